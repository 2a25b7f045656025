mod motions;
mod studies;
