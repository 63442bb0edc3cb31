pub mod activity_scorer;
pub mod budget_allocator;
pub mod itinerary_generation_service;
pub mod itinerary_validator;
pub mod providers;
