#![no_main]

use libfuzzer_sys::fuzz_target;

use kata_shapes::{Circle, Rectangle, Shape, Triangle};

// Area and perimeter must never panic, whatever the dimensions
// (NaN, infinities and impossible triangles included).
fuzz_target!(|dims: (f64, f64, f64)| {
    let (a, b, c) = dims;
    let shapes: [&dyn Shape; 3] = [
        &Rectangle::new(a, b),
        &Circle::new(a),
        &Triangle::new(a, b, c),
    ];
    for shape in shapes {
        let _ = shape.area();
        let _ = shape.perimeter();
    }
});
