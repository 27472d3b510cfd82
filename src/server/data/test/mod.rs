mod auction;
mod bid;
mod invite;
mod item;
mod member;
mod user;
