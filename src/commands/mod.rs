mod config;
mod curriculum;
mod state;
mod upload;
mod wizard;

pub use config::{get_config, update_config};
pub use curriculum::{
    add_lecture, add_section, close_content_editor, delete_lecture, delete_section,
    get_curriculum, move_lecture, move_section, open_content_editor, reorder_lectures,
    reorder_sections, save_lecture_content, toggle_section, update_lecture, update_section,
    CurriculumOutput, LectureOutput, LectureTypeOutput, SectionOutput,
};
pub use state::StudioState;
pub use upload::{cancel_upload, remove_upload, start_upload, upload_status};
pub use wizard::{
    add_learner_item, get_details, get_form_options, get_learners, get_overview,
    remove_learner_item, select_panel, set_learner_item, submit_course, update_details,
    validate_details, FormOptions, PriceTierOutput, WizardOverview,
};
