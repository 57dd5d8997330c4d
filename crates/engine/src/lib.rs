pub mod cell;
pub mod cell_id;
pub mod derived;
pub mod events;
pub mod kind;
pub mod persist;
pub mod policies;
pub mod policy;
pub mod pubsub;
pub mod registry;

#[cfg(test)]
pub mod harness;
