// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rgba_color::{Color, DEFAULT_LIGHTEN_STEP, DEFAULT_SHADE_COUNT};

fn main() {
    // Construct one color and print every representation of it.
    {
        let color = Color::from_hex("#abccf2");
        println!("display   : {color}");
        println!("rgba255   : {:?}", color.rgba255());
        println!("rgba1     : {:?}", color.rgba1());
        println!("packed    : {:#010x}", color.packed());
        println!("hsva      : {:?}", color.hsva());
        println!("hsla      : {:?}", color.hsla());
        println!("cmyka     : {:?}", color.cmyka());
        println!("hexa      : {}", color.hexa());
        println!("hex       : {}", color.hex());
        println!("is dark   : {}", color.is_dark());
        println!("inverted  : {}", color.inverted());
    }

    // Arithmetic: every operation returns a new color.
    {
        let warm = Color::from_rgb255(200.0, 120.0, 40.0);
        let cold = Color::from_rgb255(40.0, 120.0, 200.0);
        println!();
        println!("warm + cold     : {}", warm.add(&cold, None, false));
        println!("warm - cold     : {}", warm.subtract(&cold, None, false));
        println!("diff(warm,cold) : {}", warm.diff(&cold, None));
        println!("warm lighter    : {}", warm.lighter(DEFAULT_LIGHTEN_STEP));
        println!("warm darker     : {}", warm.darker(DEFAULT_LIGHTEN_STEP));
    }

    // A shade ramp from darker to lighter around a base color.
    {
        let base = Color::from_rgb255(100.0, 100.0, 100.0);
        println!();
        println!("shade ramp around {base}:");
        for shade in base.shades(DEFAULT_SHADE_COUNT) {
            println!("  {shade}");
        }
    }
}
