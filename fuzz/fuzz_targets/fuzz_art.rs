#![no_main]

use libfuzzer_sys::fuzz_target;

use image::GrayImage;
use picalc_cli::art::Canvas;
use picalc_core::constants::REFERENCE_DIGITS;
use picalc_core::digits::DigitString;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let width = u32::from(data[0] % 64) + 1;
    let inverted = data[1] & 1 == 1;
    let pixels = &data[2..];
    let height = u32::try_from(pixels.len()).unwrap() / width;
    if height == 0 {
        return;
    }
    let len = (width * height) as usize;
    let image = GrayImage::from_raw(width, height, pixels[..len].to_vec()).unwrap();

    let canvas = Canvas::from_pixels(&image, inverted);
    let needed = canvas.digits_needed();
    if needed > REFERENCE_DIGITS.len() {
        return;
    }
    let art = canvas
        .render(&DigitString::from_digits(&REFERENCE_DIGITS[..needed]))
        .unwrap();

    let filled: String = art.chars().filter(char::is_ascii_digit).collect();
    assert_eq!(filled, &REFERENCE_DIGITS[..needed]);
    assert!(art.lines().count() <= height as usize);
    assert!(art.lines().all(|row| row.chars().count() == width as usize));
});
