mod helpers;

mod calendars;
mod concurrency;
mod objects;
