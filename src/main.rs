use course_studio::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logging();
    tracing::info!("Course studio starting...");

    course_studio::run().await?;
    Ok(())
}
