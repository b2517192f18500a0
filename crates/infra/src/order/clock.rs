//! System date and random reference suffixes

use chrono::{Local, NaiveDate};
use freehold_core::order::ports::{Clock, ReferenceSuffixSource};
use rand::Rng;

/// Local calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Uniform random reference suffix in `1000..=9999`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSuffix;

impl ReferenceSuffixSource for RandomSuffix {
    fn next_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(1000..=9999)
    }
}
