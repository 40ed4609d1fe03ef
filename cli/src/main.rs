mod logging;

use std::{path::PathBuf, process::ExitCode, sync::Arc, time::Duration};

use async_std::{channel::unbounded, task};
use clap::{Parser, Subcommand};
use core_types::{
    UploadedFile,
    events::UploadEvent,
    listing::{District, RentType},
};
use domain::{
    listing_filter::{BedroomFilter, ListingFilter},
    models::demo_listings,
};
use photo_storage::SimulatedPhotoStorage;
use service::{
    error::Error,
    photo_upload::{PhotoUploadController, UploadOptions},
    settings_service::SettingsService,
};
use utils::file_util::{format_file_size, raw_file_from_path};

#[derive(Parser, Debug)]
#[command(name = "realty", about = "Listing photo uploads and listing search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload photos as one batch
    Upload {
        /// Files to upload, non-image files are ignored
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Maximum number of photos in the set
        #[arg(long)]
        max_files: Option<usize>,

        /// Use the photo limit of the property form
        #[arg(long, conflicts_with = "max_files")]
        listing: bool,

        /// Simulated transfer time per photo, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// JSON settings file
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Search the demo listings
    Listings {
        /// long or daily
        #[arg(long, default_value = "long")]
        rent_type: RentType,

        /// District to include, can be repeated
        #[arg(long = "district")]
        districts: Vec<District>,

        /// any, studio, a number or 4+
        #[arg(long, default_value = "any")]
        bedrooms: BedroomFilter,

        /// Free text matched against title, location and district
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        min_price: Option<u64>,

        #[arg(long)]
        max_price: Option<u64>,
    },
}

fn main() -> ExitCode {
    let _guard = logging::init_logging();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Upload {
            paths,
            max_files,
            listing,
            delay_ms,
            settings,
        } => task::block_on(upload(paths, max_files, listing, delay_ms, settings)),
        Command::Listings {
            rent_type,
            districts,
            bedrooms,
            query,
            min_price,
            max_price,
        } => {
            let mut filter = ListingFilter::new(rent_type);
            for district in districts {
                filter.toggle_district(district);
            }
            filter.bedrooms = bedrooms;
            filter.query = query.unwrap_or_default();
            if min_price.is_some() || max_price.is_some() {
                filter.set_price_range(
                    min_price.unwrap_or(filter.price.min),
                    max_price.unwrap_or(filter.price.max),
                );
            }
            print_listings(&filter);
            Ok(())
        }
    }
}

async fn upload(
    paths: Vec<PathBuf>,
    max_files: Option<usize>,
    listing: bool,
    delay_ms: Option<u64>,
    settings_file: Option<PathBuf>,
) -> Result<(), Error> {
    let mut settings = SettingsService::new(settings_file).load_settings()?;
    if let Some(max_files) = max_files {
        settings.max_photo_count = max_files;
    }
    if let Some(delay_ms) = delay_ms {
        settings.simulated_upload_delay = Duration::from_millis(delay_ms);
    }

    let mut candidates = Vec::with_capacity(paths.len());
    for path in &paths {
        let file = raw_file_from_path(path).map_err(|e| {
            Error::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        candidates.push(file);
    }

    let (progress_tx, progress_rx) = unbounded::<UploadEvent>();
    let printer = task::spawn(async move {
        while let Ok(event) = progress_rx.recv().await {
            print_event(&event);
        }
    });

    let mut options = if listing {
        UploadOptions::for_listing(&settings)
    } else {
        UploadOptions::from_settings(&settings)
    };
    options.progress_tx = Some(progress_tx);
    let controller = PhotoUploadController::new(
        Arc::new(SimulatedPhotoStorage::with_delay(
            settings.simulated_upload_delay,
        )),
        Arc::new(|files: &[UploadedFile]| {
            tracing::debug!(count = files.len(), "Accepted photos changed");
        }),
        options,
    )?;

    let result = controller.select_files(candidates).await;
    let snapshot = controller.snapshot();
    // closes the progress channel
    drop(controller);
    printer.await;

    let Some(outcome) = result? else {
        return Ok(());
    };
    if outcome.discarded > 0 {
        println!("Ignored {} file(s) that are not images", outcome.discarded);
    }
    for failed in &outcome.failed {
        println!("Could not upload {}: {}", failed.name, failed.error);
    }
    println!("{}", snapshot.count_label());
    for file in &snapshot.accepted {
        println!(
            "  {}  {}  {}",
            file.name,
            format_file_size(file.size_bytes),
            file.reference
        );
    }
    Ok(())
}

fn print_event(event: &UploadEvent) {
    match event {
        UploadEvent::BatchStarted { total_files } => {
            println!("Uploading {} photo(s)", total_files)
        }
        UploadEvent::FileTransferStarted {
            name,
            file_number,
            total_files,
        } => println!("[{}/{}] {}", file_number, total_files, name),
        UploadEvent::FileTransferCompleted {
            progress_percent, ..
        } => println!("{}% uploaded", progress_percent.round() as u32),
        UploadEvent::FileTransferFailed {
            name,
            error,
            progress_percent,
            ..
        } => println!(
            "{} failed: {} ({}% uploaded)",
            name,
            error,
            progress_percent.round() as u32
        ),
        UploadEvent::BatchCompleted { stored, failed } => {
            println!("Done: {} stored, {} failed", stored, failed)
        }
        // reported by main through the returned error
        UploadEvent::BatchRejected { .. } => {}
    }
}

fn print_listings(filter: &ListingFilter) {
    let listings = demo_listings();
    let matching = filter.apply(&listings);
    if matching.is_empty() {
        println!("No listings match the filters");
        return;
    }
    for listing in matching {
        let district = listing
            .district
            .map(|d| d.to_string())
            .unwrap_or_else(|| listing.location.clone());
        println!(
            "{:>3}  {:<40} {:>9} {}  {} bd  {} sqm  {}",
            listing.id,
            listing.title,
            listing.price,
            listing.currency,
            listing.bedrooms,
            listing.sqm,
            district
        );
    }
}
