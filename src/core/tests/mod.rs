mod cycle_analyzer_tests;
mod pulse_scheduler_tests;
