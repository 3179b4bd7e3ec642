pub mod coachings;
pub mod health;
pub mod hello;
pub mod projects;
