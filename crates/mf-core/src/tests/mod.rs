mod listable;
mod models;
mod seed;
