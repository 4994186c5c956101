mod trainer_data;

pub use trainer_data::{
    TrainerData,
    TrainerTeamMember,
};
