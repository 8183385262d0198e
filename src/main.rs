use std::env;

use reelgen::{ReelConfig, ReelPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    reelgen::logger::init_with_config(
        reelgen::logger::LoggerConfig::development()
            .with_level(reelgen::logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    log::info!("🔍 Checking AWS environment...");

    if let Ok(profile) = env::var("AWS_PROFILE") {
        log::info!("AWS_PROFILE: {}", profile);
    }

    if let Ok(region) = env::var("AWS_REGION").or_else(|_| env::var("AWS_DEFAULT_REGION")) {
        log::info!("AWS region: {}", region);
    } else {
        log::warn!("No AWS region environment variable set, using us-east-1");
    }

    match (
        env::var("AWS_ACCESS_KEY_ID"),
        env::var("AWS_SECRET_ACCESS_KEY"),
    ) {
        (Ok(_), Ok(_)) => log::info!("✅ AWS credentials found in environment"),
        _ => log::warn!(
            "⚠️  No AWS credentials in environment variables, will try default credential chain"
        ),
    }

    let config = ReelConfig::from_env();
    if config.output.bucket.is_empty() {
        log::error!("❌ REELGEN_OUTPUT_BUCKET must be set");
        return Err("missing output bucket".into());
    }

    log::info!("🔄 Creating generation pipeline...");
    let pipeline = ReelPipeline::new(config).await?;
    log::info!("✅ Pipeline initialized (model: {})", pipeline.video().model_id());

    // Optional: pick a product image from the catalog to guide generation.
    let mut reference_bytes: Option<Vec<u8>> = None;
    if pipeline.config().catalog_bucket.is_some() {
        let prefix = env::var("REELGEN_CATALOG_PREFIX").unwrap_or_else(|_| "products/".to_string());
        match pipeline.list_catalog_images(&prefix).await {
            Ok(entries) if !entries.is_empty() => {
                for entry in &entries {
                    log::info!("🖼️  {} ({})", entry.name, entry.key);
                }
                let selected = &entries[0];
                log::info!("📦 Using product image: {}", selected.name);
                reference_bytes = Some(pipeline.fetch_catalog_image(&selected.key).await?);
            }
            Ok(_) => log::warn!("⚠️  No product images found under {}", prefix),
            Err(e) => log::warn!("⚠️  Catalog listing failed: {}", e),
        }
    }

    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let prompt = if prompt.trim().is_empty() {
        "Create a cinematic video showcasing the product with dynamic camera movements and professional lighting.".to_string()
    } else {
        prompt
    };

    log::info!("📝 Prompt: {}", prompt);

    match pipeline.generate(&prompt, reference_bytes.as_deref()).await {
        Ok(video) => {
            log::info!("🎬 Clip stored at: {}", video.location);
            log::info!("▶️  Watch (valid 24h): {}", video.url);
            log::info!(
                "📤 Share: {}",
                ReelPipeline::share_url(
                    "🌟 Check out this AI-generated video created with Amazon Bedrock! #AI #Marketing #GenerativeAI"
                )
            );

            if env::var("REELGEN_DOWNLOAD").map_or(false, |v| v == "true" || v == "1") {
                let bytes = pipeline.storage().download_artifact(&video.url).await?;
                std::fs::write("generated_video.mp4", &bytes)?;
                log::info!("💾 Saved generated_video.mp4 ({} bytes)", bytes.len());
            }
        }
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
