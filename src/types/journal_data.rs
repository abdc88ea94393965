use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseVariation {
    pub grip_type: Option<String>,
    pub position_type: Option<String>,
    pub movement_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Set {
    pub variation: Option<ExerciseVariation>,
    pub reps: u32,
    /// One-sided rep count, written as `(<n> OB)`.
    pub alt_reps: u32,
    pub form: String,
    pub rest_time: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Exercise {
    pub exercise_type: String,
    pub sets: Vec<Set>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub date: NaiveDate,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub exercises: Vec<Exercise>,
}

impl Session {
    pub fn new(date: NaiveDate) -> Self {
        Session { date, weight: None, body_fat: None, exercises: Vec::new() }
    }

    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkoutLog {
    pub sessions: Vec<Session>,
}

impl WorkoutLog {
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.sessions.iter().map(|s| s.date).collect()
    }

    /// Weight readings aligned by index with [`WorkoutLog::dates`].
    pub fn weights(&self) -> Vec<Option<f64>> {
        self.sessions.iter().map(|s| s.weight).collect()
    }

    /// Body-fat readings aligned by index with [`WorkoutLog::dates`].
    pub fn body_fats(&self) -> Vec<Option<f64>> {
        self.sessions.iter().map(|s| s.body_fat).collect()
    }

    pub fn exercise_count(&self) -> usize {
        self.sessions.iter().map(|s| s.exercises.len()).sum()
    }

    pub fn set_count(&self) -> usize {
        self.sessions.iter().map(Session::set_count).sum()
    }
}
