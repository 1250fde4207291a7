use crate::config::constants::CONFIG_ENV;
use crate::models::category_dto::Category;
use crate::models::form_dao::UploadForm;
use crate::models::image_dao::ImageFile;
use crate::services::client::HttpUploader;
use crate::services::orchestrator::Submit;
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short = 'f', long, env = CONFIG_ENV, default_value = "config.yaml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the upload server (default)
    Serve,
    /// Upload station photos to a running server
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Base URL of the upload server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// NaviLensGo, Fotos or Otro
    #[arg(long)]
    pub category: Category,

    /// Station name, as listed by /api/stations
    #[arg(long = "stop")]
    pub stop_name: String,

    /// Name to credit; uploads are anonymous when omitted
    #[arg(long, default_value = "")]
    pub attribution: String,

    /// Skip the confirmation asked when sending more than one image
    #[arg(short, long)]
    pub yes: bool,

    /// Up to five image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

fn confirm(count: usize) -> io::Result<bool> {
    print!(
        "Estás a punto de subir {count} imágenes. Asegúrate de que todas pertenecen a la misma parada y categoría. ¿Continuar? [s/N] "
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes"))
}

pub async fn submit(args: SubmitArgs) -> anyhow::Result<()> {
    let uploader = HttpUploader::new(&args.server)?;

    let mut selected = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let file = ImageFile::from_path(path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?;
        selected.push(file);
    }

    let mut form = UploadForm::new();
    form.set_category(args.category);
    form.set_stop_name(args.stop_name);
    form.set_attribution(args.attribution);

    let outcome = form.stage(selected)?;
    for (name, reason) in &outcome.rejected {
        warn!("skipping {}: {}", name, reason);
    }

    match form.request_submit()? {
        Submit::Ready => {}
        Submit::NeedsConfirmation(count) => {
            if !args.yes && !confirm(count)? {
                bail!("upload cancelled");
            }
        }
    }

    info!(
        "uploading {} file(s) to {} / {}",
        form.files.len(),
        args.category.label(),
        form.stop_name
    );
    let responses = form.perform_upload(&uploader).await?;
    for response in &responses {
        println!("{}", response.url);
    }
    println!("¡Gracias! {} imagen(es) subida(s)", responses.len());

    Ok(())
}
