use super::Architecture;

/// Highest score still recommended as a monolith.
pub const MONOLITH_BOUNDARY: u8 = 35;
/// Highest score still recommended as a modular monolith.
pub const MICROSERVICES_BOUNDARY: u8 = 65;

const CONFIDENCE_FLOOR: i32 = 70;
const CONFIDENCE_CEILING: i32 = 95;

pub fn classify(score: u8) -> Architecture {
    if score <= MONOLITH_BOUNDARY {
        Architecture::Monolith
    } else if score <= MICROSERVICES_BOUNDARY {
        Architecture::ModularMonolith
    } else {
        Architecture::Microservices
    }
}

/// Confidence grows with the distance between the score and the nearest
/// boundary of its band: `70 + round(distance * 1.2)`, clamped to 70..=95.
pub fn confidence(architecture: Architecture, score: u8) -> u8 {
    let score = i32::from(score);
    let monolith = i32::from(MONOLITH_BOUNDARY);
    let modular = i32::from(MICROSERVICES_BOUNDARY);

    let distance = match architecture {
        Architecture::Monolith => monolith - score,
        Architecture::ModularMonolith => (score - monolith).min(modular - score),
        Architecture::Microservices => score - modular,
    };

    let confidence = CONFIDENCE_FLOOR + scaled_distance(distance);
    confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING) as u8
}

/// `round_half_up(distance * 1.2)` in integer arithmetic.
fn scaled_distance(distance: i32) -> i32 {
    (distance * 12 + 5).div_euclid(10)
}
