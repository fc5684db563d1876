pub mod use_roster;
