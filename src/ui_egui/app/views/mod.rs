mod daily_wins;
mod login;
mod people;
