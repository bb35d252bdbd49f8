//! Skill handlers.

mod music_buff_skill;
mod skill_executor;
mod skill_handler;

pub use music_buff_skill::MusicBuffSkill;
pub use skill_executor::SkillExecutor;
pub use skill_handler::SkillHandler;
