//! Minimum example on how to use this library. Converts a small pitch track
//! to cents relative to concert pitch A4 and prints the result.

use hz_to_cent::hz_to_cent_with_min;

fn main() {
    simple_logger::init_with_level(log::Level::Debug).unwrap();

    // A short pitch track as a pitch tracker would emit it: voiced frames
    // with a frequency estimate, unvoiced frames with a low placeholder
    // value (here: 20 Hz, the lower bound of the audible range).
    let pitch_track_hz = [220.0, 233.08, 246.94, 20.0, 440.0, 466.16, 493.88];
    let reference_hz = 440.0;
    let minimum_hz = 50.0;

    let cents = hz_to_cent_with_min(&pitch_track_hz, reference_hz, minimum_hz).unwrap();

    println!("reference: {reference_hz} Hz");
    for (hz, cent) in pitch_track_hz.iter().zip(&cents) {
        if cent.is_nan() {
            println!("{hz:>8.2} Hz -> (inaudible)");
        } else {
            println!("{hz:>8.2} Hz -> {cent:>8.2} cent");
        }
    }
}
