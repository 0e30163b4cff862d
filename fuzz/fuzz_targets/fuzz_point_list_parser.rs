#![no_main]

use libfuzzer_sys::fuzz_target;
use spline_gen::{format_point_list, parse_point_list};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Erste Zeile X, Rest Y
    let (x_text, y_text) = text.split_once('\n').unwrap_or((text, text));
    for raw in [false, true] {
        if let Ok(points) = parse_point_list(x_text, y_text, raw) {
            let (x, y) = format_point_list(&points, raw);
            let reparsed = parse_point_list(&x, &y, raw).expect("formatierte Liste muss parsbar sein");
            if raw {
                assert_eq!(reparsed, points);
            } else {
                assert_eq!(reparsed.len(), points.len());
            }
        }
    }
});
