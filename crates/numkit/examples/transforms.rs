//! Builds a model transform from scale, rotation and translation, inverts it, and records the
//! transformed corners of a unit cube in a `DArray`.
//!
//! Run with `RUST_LOG=numkit=trace` to see the array's capacity changes.

use std::f64::consts::FRAC_PI_4;

use numkit::{vec3, DArray, DebugDiff, Mat4d, Vec4d};

fn main() -> anyhow::Result<()> {
    numkit::init_logger!();

    let scale = Mat4d::scale(2.0, 2.0, 0.5);
    let rotation = Mat4d::rotation_about_axis_right(vec3(0.0, 1.0, 1.0), FRAC_PI_4)?;
    let translation = Mat4d::translation([1.0, -3.0, 4.0]);

    let model = translation * rotation * scale;
    let inverse = model.inverse()?;
    log::info!("model transform: {:?}", model);
    log::info!("determinant: {}", model.determinant());

    let mut corners = DArray::with_capacity(1)?;
    for i in 0..8 {
        let corner = Vec4d::from([
            (i & 1) as f64,
            ((i >> 1) & 1) as f64,
            ((i >> 2) & 1) as f64,
            1.0,
        ]);
        corners.push(model * corner)?;
    }

    for (i, corner) in corners.iter().enumerate() {
        let restored = inverse * *corner;
        println!("corner {i}: {corner} (restored: {restored})");
    }

    let expected = Mat4d::IDENTITY;
    let roundtrip = inverse * model;
    if !numkit::approx::ApproxEq::approx_eq(&roundtrip, &expected) {
        anyhow::bail!("inverse is inaccurate:\n{}", Mat4d::debug_diff(&expected, &roundtrip));
    }

    Ok(())
}
