use chrono::NaiveDateTime;
use mockall::mock;

use crate::clock::Clock;

// Mock clock for testing
mock! {
    pub Clock {}

    impl Clock for Clock {
        fn now(&self) -> NaiveDateTime;
    }
}
