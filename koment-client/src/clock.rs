use chrono::Utc;

use crate::api::Time;

pub trait Clock {
    fn now(&self) -> Time;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        Utc::now()
    }
}

#[cfg(test)]
pub(crate) use test_clock::StepClock;
