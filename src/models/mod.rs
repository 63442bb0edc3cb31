pub mod agent_log;
pub mod itinerary;
pub mod trip;
