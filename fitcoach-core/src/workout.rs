//! Static workout catalog offered by the workout selector.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::Low => write!(f, "Low"),
            Intensity::Medium => write!(f, "Medium"),
            Intensity::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workout {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub intensity: Intensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub workouts: &'static [Workout],
}

const fn workout(
    id: &'static str,
    name: &'static str,
    duration: &'static str,
    intensity: Intensity,
) -> Workout {
    Workout {
        id,
        name,
        duration,
        intensity,
    }
}

pub const WORKOUT_CATEGORIES: &[WorkoutCategory] = &[
    WorkoutCategory {
        key: "cardio",
        title: "Cardio Training",
        workouts: &[
            workout("running", "Running", "30 min", Intensity::Medium),
            workout("cycling", "Cycling", "45 min", Intensity::Medium),
            workout("swimming", "Swimming", "30 min", Intensity::Low),
            workout("hiit", "HIIT", "20 min", Intensity::High),
        ],
    },
    WorkoutCategory {
        key: "strength",
        title: "Strength Training",
        workouts: &[
            workout("upper_body", "Upper Body", "45 min", Intensity::Medium),
            workout("lower_body", "Lower Body", "45 min", Intensity::Medium),
            workout("full_body", "Full Body", "60 min", Intensity::High),
            workout("core", "Core Focus", "30 min", Intensity::Medium),
        ],
    },
    WorkoutCategory {
        key: "flexibility",
        title: "Flexibility & Recovery",
        workouts: &[
            workout("yoga", "Yoga", "45 min", Intensity::Low),
            workout("stretching", "Stretching", "20 min", Intensity::Low),
            workout("pilates", "Pilates", "45 min", Intensity::Medium),
            workout("mobility", "Mobility", "30 min", Intensity::Low),
        ],
    },
];

pub fn find_workout(id: &str) -> Option<&'static Workout> {
    WORKOUT_CATEGORIES
        .iter()
        .flat_map(|category| category.workouts.iter())
        .find(|workout| workout.id == id)
}

/// Banner text for a selected workout id, e.g. `upper_body` -> `UPPER BODY`.
/// Only the first underscore is replaced.
pub fn selection_label(id: &str) -> String {
    id.replacen('_', " ", 1).to_uppercase()
}
