pub mod assistant_agent;
pub mod factory;
pub mod interface;
pub mod tennis_agent;

pub use factory::AgentFactory;
pub use interface::AgentInterface;
pub use tennis_agent::CourtSuggestion;
