use crate::commands::{self, StudioState};
use crate::config::Config;
use crate::error::{Result, StudioError};
use crate::models::{CourseDetailsPatch, LearnerList, LecturePatch, SectionPatch};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// (name, description, category)
const COMMANDS: &[(&str, &str, &str)] = &[
    ("wizard.overview", "Get title, active panel, sidebar and progress", "Wizard"),
    ("wizard.select_panel", "Switch the active authoring panel", "Wizard"),
    ("wizard.form_options", "List categories, levels, languages and price tiers", "Wizard"),
    ("wizard.submit", "Validate and serialize the whole draft", "Wizard"),
    ("details.get", "Get the course details form", "Details"),
    ("details.update", "Edit course details and get inline errors", "Details"),
    ("details.validate", "Validate the course details form", "Details"),
    ("learners.get", "Get intended learner lists", "Learners"),
    ("learners.set", "Overwrite one intended learner item", "Learners"),
    ("learners.add", "Append an empty intended learner item", "Learners"),
    ("learners.remove", "Remove one intended learner item", "Learners"),
    ("curriculum.get", "Get sections and lectures as rendered", "Curriculum"),
    ("curriculum.add_section", "Append an empty section", "Curriculum"),
    ("curriculum.update_section", "Edit a section's title or objective", "Curriculum"),
    ("curriculum.delete_section", "Delete a section and its lectures", "Curriculum"),
    ("curriculum.add_lecture", "Append a lecture of a given type", "Curriculum"),
    ("curriculum.update_lecture", "Edit a lecture's title or duration", "Curriculum"),
    ("curriculum.delete_lecture", "Delete a lecture", "Curriculum"),
    ("curriculum.reorder_sections", "Move a section between positions", "Curriculum"),
    ("curriculum.reorder_lectures", "Move a lecture within its section", "Curriculum"),
    ("curriculum.move_section", "Drop a section onto another", "Curriculum"),
    ("curriculum.move_lecture", "Drop a lecture onto another in the same section", "Curriculum"),
    ("curriculum.toggle_section", "Expand or collapse a section panel", "Curriculum"),
    ("editor.open", "Open the content editor and get the lecture with its content", "Editor"),
    ("editor.close", "Close the content editor without saving", "Editor"),
    ("editor.save", "Save content into the open lecture", "Editor"),
    ("upload.start", "Upload a local file into a media slot", "Upload"),
    ("upload.cancel", "Cancel the in-flight upload of a slot", "Upload"),
    ("upload.remove", "Remove a slot's uploaded media", "Upload"),
    ("upload.status", "Get a slot's upload state", "Upload"),
    ("config.get", "Get studio configuration", "Config"),
    ("config.update", "Save studio configuration for the next start", "Config"),
];

pub fn get_commands_list() -> Value {
    let commands: Vec<Value> = COMMANDS
        .iter()
        .map(|(name, desc, category)| {
            serde_json::json!({
                "name": name,
                "description": desc,
                "category": category,
            })
        })
        .collect();

    serde_json::json!({ "commands": commands })
}

fn parse_args<T: DeserializeOwned>(name: &str, args: Value) -> Result<T> {
    serde_json::from_value(args)
        .map_err(|e| StudioError::InvalidArgument(format!("Invalid {} args: {}", name, e)))
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[derive(Deserialize)]
struct PanelArgs {
    panel: String,
}

#[derive(Deserialize)]
struct LearnerSetArgs {
    list: LearnerList,
    index: usize,
    text: String,
}

#[derive(Deserialize)]
struct LearnerListArgs {
    list: LearnerList,
}

#[derive(Deserialize)]
struct LearnerIndexArgs {
    list: LearnerList,
    index: usize,
}

#[derive(Deserialize)]
struct SectionArgs {
    section_id: String,
}

#[derive(Deserialize)]
struct UpdateSectionArgs {
    section_id: String,
    #[serde(flatten)]
    patch: SectionPatch,
}

#[derive(Deserialize)]
struct AddLectureArgs {
    section_id: String,
    #[serde(rename = "type", default = "default_lecture_type")]
    lecture_type: String,
}

fn default_lecture_type() -> String {
    "video".to_string()
}

#[derive(Deserialize)]
struct LectureArgs {
    section_id: String,
    lecture_id: String,
}

#[derive(Deserialize)]
struct UpdateLectureArgs {
    section_id: String,
    lecture_id: String,
    title: Option<String>,
    duration: Option<String>,
}

#[derive(Deserialize)]
struct ReorderArgs {
    #[serde(default)]
    section_id: Option<String>,
    old_index: usize,
    new_index: usize,
}

#[derive(Deserialize)]
struct MoveArgs {
    #[serde(default)]
    section_id: Option<String>,
    active_id: String,
    over_id: String,
}

#[derive(Deserialize)]
struct SaveContentArgs {
    content: Value,
}

#[derive(Deserialize)]
struct SlotArgs {
    slot: String,
}

#[derive(Deserialize)]
struct StartUploadArgs {
    slot: String,
    file_path: String,
}

pub async fn handle_command(state: &StudioState, name: &str, args: Value) -> Result<Value> {
    match name {
        "wizard.overview" => to_value(commands::get_overview(state).await?),
        "wizard.select_panel" => {
            let args: PanelArgs = parse_args(name, args)?;
            to_value(commands::select_panel(state, args.panel).await?)
        }
        "wizard.form_options" => to_value(commands::get_form_options().await?),
        "wizard.submit" => to_value(commands::submit_course(state).await?),

        "details.get" => to_value(commands::get_details(state).await?),
        "details.update" => {
            let patch: CourseDetailsPatch = parse_args(name, args)?;
            to_value(commands::update_details(state, patch).await?)
        }
        "details.validate" => to_value(commands::validate_details(state).await?),

        "learners.get" => to_value(commands::get_learners(state).await?),
        "learners.set" => {
            let args: LearnerSetArgs = parse_args(name, args)?;
            to_value(commands::set_learner_item(state, args.list, args.index, args.text).await?)
        }
        "learners.add" => {
            let args: LearnerListArgs = parse_args(name, args)?;
            to_value(commands::add_learner_item(state, args.list).await?)
        }
        "learners.remove" => {
            let args: LearnerIndexArgs = parse_args(name, args)?;
            to_value(commands::remove_learner_item(state, args.list, args.index).await?)
        }

        "curriculum.get" => to_value(commands::get_curriculum(state).await?),
        "curriculum.add_section" => to_value(commands::add_section(state).await?),
        "curriculum.update_section" => {
            let args: UpdateSectionArgs = parse_args(name, args)?;
            to_value(commands::update_section(state, args.section_id, args.patch).await?)
        }
        "curriculum.delete_section" => {
            let args: SectionArgs = parse_args(name, args)?;
            to_value(commands::delete_section(state, args.section_id).await?)
        }
        "curriculum.add_lecture" => {
            let args: AddLectureArgs = parse_args(name, args)?;
            to_value(commands::add_lecture(state, args.section_id, args.lecture_type).await?)
        }
        "curriculum.update_lecture" => {
            let args: UpdateLectureArgs = parse_args(name, args)?;
            let patch = LecturePatch {
                title: args.title,
                duration: args.duration,
                ..Default::default()
            };
            to_value(commands::update_lecture(state, args.section_id, args.lecture_id, patch).await?)
        }
        "curriculum.delete_lecture" => {
            let args: LectureArgs = parse_args(name, args)?;
            to_value(commands::delete_lecture(state, args.section_id, args.lecture_id).await?)
        }
        "curriculum.reorder_sections" => {
            let args: ReorderArgs = parse_args(name, args)?;
            to_value(commands::reorder_sections(state, args.old_index, args.new_index).await?)
        }
        "curriculum.reorder_lectures" => {
            let args: ReorderArgs = parse_args(name, args)?;
            let section_id = args.section_id.ok_or_else(|| {
                StudioError::InvalidArgument("'section_id' is required".to_string())
            })?;
            to_value(
                commands::reorder_lectures(state, section_id, args.old_index, args.new_index)
                    .await?,
            )
        }
        "curriculum.move_section" => {
            let args: MoveArgs = parse_args(name, args)?;
            to_value(commands::move_section(state, args.active_id, args.over_id).await?)
        }
        "curriculum.move_lecture" => {
            let args: MoveArgs = parse_args(name, args)?;
            let section_id = args.section_id.ok_or_else(|| {
                StudioError::InvalidArgument("'section_id' is required".to_string())
            })?;
            to_value(
                commands::move_lecture(state, section_id, args.active_id, args.over_id).await?,
            )
        }
        "curriculum.toggle_section" => {
            let args: SectionArgs = parse_args(name, args)?;
            to_value(commands::toggle_section(state, args.section_id).await?)
        }

        "editor.open" => {
            let args: LectureArgs = parse_args(name, args)?;
            to_value(commands::open_content_editor(state, args.section_id, args.lecture_id).await?)
        }
        "editor.close" => to_value(commands::close_content_editor(state).await?),
        "editor.save" => {
            let args: SaveContentArgs = parse_args(name, args)?;
            to_value(commands::save_lecture_content(state, args.content).await?)
        }

        "upload.start" => {
            let args: StartUploadArgs = parse_args(name, args)?;
            to_value(commands::start_upload(state, args.slot, args.file_path).await?)
        }
        "upload.cancel" => {
            let args: SlotArgs = parse_args(name, args)?;
            to_value(commands::cancel_upload(state, args.slot).await?)
        }
        "upload.remove" => {
            let args: SlotArgs = parse_args(name, args)?;
            to_value(commands::remove_upload(state, args.slot).await?)
        }
        "upload.status" => {
            let args: SlotArgs = parse_args(name, args)?;
            to_value(commands::upload_status(state, args.slot).await?)
        }

        "config.get" => to_value(commands::get_config().await?),
        "config.update" => {
            let config: Config = parse_args(name, args)?;
            to_value(commands::update_config(config).await?)
        }

        _ => Err(StudioError::InvalidArgument(format!(
            "Unknown command: {}",
            name
        ))),
    }
}
