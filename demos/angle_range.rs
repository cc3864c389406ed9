//! Validates pairs of joint angles and reports every out-of-range value at once.
//!
//! Run with `cargo run --example angle_range`.

use outcome_rail::combine::map2;
use outcome_rail::types::ErrorsFormatConfig;
use outcome_rail::validation::Validation;

const MIN_DEGREES: i32 = 0;
const MAX_DEGREES: i32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JointPose {
    shoulder: i32,
    elbow: i32,
}

fn angle(degrees: i32) -> Validation<i32, String> {
    if (MIN_DEGREES..=MAX_DEGREES).contains(&degrees) {
        Validation::valid(degrees)
    } else {
        Validation::invalid(format!("{degrees} is outside the range of {MIN_DEGREES} to {MAX_DEGREES}"))
    }
}

fn pose(shoulder: i32, elbow: i32) -> Validation<JointPose, String> {
    map2(angle(shoulder), angle(elbow), |shoulder, elbow| JointPose { shoulder, elbow })
}

fn main() {
    for (shoulder, elbow) in [(-5, 200), (90, 200), (10, 170)] {
        let report = pose(shoulder, elbow).fold(
            |pose| format!("accepted {pose:?}"),
            |errors| {
                errors
                    .display_with(ErrorsFormatConfig::bulleted())
                    .with_header(format!("rejected ({} problem(s)):", errors.len()))
                    .to_string()
            },
        );
        println!("({shoulder}, {elbow}) -> {report}");
    }
}
