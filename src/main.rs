// src/main.rs
//
// Sanity run: feeds synthetic media through each panel and prints what a
// host would display.

use mediatensor::{
    AudioClip, AudioPanel, ImagePanel, PixelBuffer, PixelMatrix, SelectionField, VideoPanel,
};

/// ===============================
/// Synthetic sources
/// ===============================

fn gradient(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        [
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
            255,
        ]
    })
}

fn sine(frequency: f64, sample_rate: f64, seconds: f64) -> Vec<f32> {
    let frames = (sample_rate * seconds) as usize;
    (0..frames)
        .map(|i| (i as f64 / sample_rate * frequency * std::f64::consts::TAU).sin() as f32)
        .collect()
}

/// ===============================
/// Main
/// ===============================

fn main() {
    // --------------------------------
    // Image
    // --------------------------------

    println!("--- Image ---");
    let mut image = ImagePanel::new();
    image.load(gradient(64, 48));

    // Drag from bottom-right to top-left.
    image.pointer_down(13.6, 9.2);
    image.pointer_move(10.1, 7.4);
    image.pointer_up();

    if let PixelMatrix::Grid(rows) = image.pixel_matrix() {
        for row in &rows {
            let cells: Vec<String> = row.iter().map(|c| c.css()).collect();
            println!("{}", cells.join("  "));
        }
    }

    image.toggle_data();
    println!("{}", image.data_text());

    // --------------------------------
    // Video
    // --------------------------------

    println!("--- Video ---");
    let mut video = VideoPanel::new();
    video.load_source();
    video.load_metadata(32, 32, 10.0);
    video.seek(2.5);
    video.capture_frame(gradient(32, 32));
    video.set_field(SelectionField::Width, 2);
    video.set_field(SelectionField::Height, 2);
    video.toggle_data();
    println!("{}", video.data_text());

    // --------------------------------
    // Audio
    // --------------------------------

    println!("--- Audio ---");
    let sample_rate = 8_000.0;
    let clip = match AudioClip::mono(sine(440.0, sample_rate, 0.5), sample_rate) {
        Ok(clip) => clip,
        Err(e) => {
            println!("Error building clip: {}", e);
            return;
        }
    };

    let mut audio = AudioPanel::new();
    audio.load(clip);
    audio.set_end(0.003);
    audio.toggle_data();

    println!("{}", audio.chart().path_data());
    println!("{}", audio.data_text());

    println!("Sanity run completed.");
}
