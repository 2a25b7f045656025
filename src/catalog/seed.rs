//! Starter MODAPTS table loaded into an empty catalog on first run.

use crate::db::{MotionCategory, MotionDefinition};

struct SeedMotion {
    code: &'static str,
    category: MotionCategory,
    description: &'static str,
    body_region: &'static str,
    mod_value: f64,
}

const MODAPTS_MOTIONS: &[SeedMotion] = &[
    // Move
    SeedMotion {
        code: "M1",
        category: MotionCategory::Move,
        description: "Move object, very short distance",
        body_region: "fingers",
        mod_value: 1.0,
    },
    SeedMotion {
        code: "M2",
        category: MotionCategory::Move,
        description: "Move object, short distance",
        body_region: "hand",
        mod_value: 2.0,
    },
    SeedMotion {
        code: "M3",
        category: MotionCategory::Move,
        description: "Move object, medium distance",
        body_region: "arm",
        mod_value: 3.0,
    },
    SeedMotion {
        code: "M4",
        category: MotionCategory::Move,
        description: "Move object, long distance",
        body_region: "arm",
        mod_value: 4.0,
    },
    SeedMotion {
        code: "M5",
        category: MotionCategory::Move,
        description: "Move object, very long distance",
        body_region: "full_arm",
        mod_value: 5.0,
    },
    // Get / grasp
    SeedMotion {
        code: "G0",
        category: MotionCategory::Get,
        description: "Get object, contact grasp",
        body_region: "fingers",
        mod_value: 0.0,
    },
    SeedMotion {
        code: "G1",
        category: MotionCategory::Get,
        description: "Get object, simple grasp",
        body_region: "fingers",
        mod_value: 1.0,
    },
    SeedMotion {
        code: "G3",
        category: MotionCategory::Get,
        description: "Get object, complex grasp",
        body_region: "hand",
        mod_value: 3.0,
    },
    // Put
    SeedMotion {
        code: "P0",
        category: MotionCategory::Put,
        description: "Put object, loose placement",
        body_region: "fingers",
        mod_value: 0.0,
    },
    SeedMotion {
        code: "P2",
        category: MotionCategory::Put,
        description: "Put object, approximate location",
        body_region: "hand",
        mod_value: 2.0,
    },
    SeedMotion {
        code: "P5",
        category: MotionCategory::Put,
        description: "Put object, tight tolerance",
        body_region: "hand",
        mod_value: 5.0,
    },
    SeedMotion {
        code: "W5",
        category: MotionCategory::Walk,
        description: "Walk 1 pace (step)",
        body_region: "leg",
        mod_value: 5.0,
    },
    // Bend / sit / stand
    SeedMotion {
        code: "B17",
        category: MotionCategory::Bend,
        description: "Bend and arise",
        body_region: "body",
        mod_value: 17.0,
    },
    SeedMotion {
        code: "S30",
        category: MotionCategory::Sit,
        description: "Sit down",
        body_region: "body",
        mod_value: 30.0,
    },
    SeedMotion {
        code: "ST30",
        category: MotionCategory::Stand,
        description: "Stand up from sitting",
        body_region: "body",
        mod_value: 30.0,
    },
    SeedMotion {
        code: "E2",
        category: MotionCategory::EyeAction,
        description: "Eye focus/shift",
        body_region: "eyes",
        mod_value: 2.0,
    },
];

pub fn modapts_motions() -> Vec<MotionDefinition> {
    MODAPTS_MOTIONS
        .iter()
        .map(|seed| {
            MotionDefinition::new(
                seed.code,
                seed.category,
                seed.description,
                seed.body_region,
                seed.mod_value,
            )
        })
        .collect()
}
