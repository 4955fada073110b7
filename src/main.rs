use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{info, warn};

use skillweave::store::CourseStore;
use skillweave::{Config, CourseGenerator, CourseOutcome, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("skillweave=info,warn")
        .init();

    let matches = Command::new("SkillWeave")
        .version("0.1.0")
        .about("Curates videos into a structured learning course for a topic")
        .arg(
            Arg::new("topic")
                .value_name("TOPIC")
                .help("Topic to build a course for")
                .required(true),
        )
        .arg(
            Arg::new("min-results")
                .short('n')
                .long("min-results")
                .value_name("NUM")
                .help("Minimum number of videos to select"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Output directory for the assembled course"),
        )
        .arg(
            Arg::new("owner")
                .long("owner")
                .value_name("ID")
                .help("Owner reference recorded on the persisted course")
                .default_value("local"),
        )
        .arg(
            Arg::new("no-cache")
                .long("no-cache")
                .help("Bypass the topic result cache")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let topic = matches.get_one::<String>("topic").unwrap();
    let min_results: Option<usize> = matches
        .get_one::<String>("min-results")
        .map(|n| n.parse())
        .transpose()?;
    let owner = matches.get_one::<String>("owner").unwrap();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if matches.get_flag("no-cache") {
        config.cache.enabled = false;
    }
    if let Some(dir) = matches.get_one::<String>("output-dir") {
        config.output.base_dir = PathBuf::from(dir);
    }
    config.validate()?;

    info!("🚀 SkillWeave starting...");
    info!("📝 Topic: {}", topic);

    let generator = CourseGenerator::new(config.clone()).await?;

    let start_time = std::time::Instant::now();
    let outcome = generator.generate(topic, min_results).await?;
    let duration = start_time.elapsed();

    match outcome {
        CourseOutcome::Course(course) => {
            info!("🎉 Assembled \"{}\" in {:.2}s", course.title, duration.as_secs_f64());
            info!("📚 Modules: {}", course.modules.len());
            info!("🎬 Videos: {}", course.video_count());
            for module in &course.modules {
                info!("  {}. {} ({} videos)", module.order_index + 1, module.title, module.videos.len());
            }

            let store = JsonFileStore::new(config.output.base_dir.clone());
            let saved = store.save_course(&course, owner).await?;
            info!("✅ Course persisted as {}", saved.course_id);
        }
        CourseOutcome::NoResults { message } => {
            warn!("😕 {}", message);
        }
    }

    Ok(())
}
