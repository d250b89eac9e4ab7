mod home;
pub use home::Home;

mod hero;
pub use hero::Hero;

mod challenges;
pub use challenges::Challenges;

mod workflow;
pub use workflow::Workflow;

mod clinical;
pub use clinical::Clinical;
