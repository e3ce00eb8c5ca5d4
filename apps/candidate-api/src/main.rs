use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = candidate_api::Args::parse();
	candidate_api::run(args).await
}
