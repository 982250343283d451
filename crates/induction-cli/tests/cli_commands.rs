//! End-to-end runs of the `induction` commands on temporary files.

use clap::Parser;
use induction_cli::{Cli, run};
use rstest::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = r#"<!DOCTYPE html><html><head></head><body>
<button role="tab" aria-controls="tab-intro">Intro</button>
<button role="tab" aria-controls="tab-equipo">Equipo</button>
<section id="tab-intro" role="tabpanel"><div data-key="intro"></div></section>
<section id="tab-equipo" role="tabpanel"><ul data-key="equipo"></ul></section>
<h1 data-fill="titulo">Inducción</h1>
</body></html>"#;

const DOCUMENT: &str = r#"{"titulo": "Bienvenida", "intro": "Hola <b>equipo</b>", "equipo": ["Ana", "Luis"]}"#;

#[fixture]
fn site() -> TempDir {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("index.html"), TEMPLATE).unwrap();
	fs::write(dir.path().join("induccion.json"), DOCUMENT).unwrap();
	dir
}

fn arg(path: &Path) -> String {
	path.display().to_string()
}

async fn run_args(args: &[String]) -> anyhow::Result<()> {
	let argv = std::iter::once("induction".to_owned()).chain(args.iter().cloned());
	run(Cli::try_parse_from(argv)?).await
}

#[rstest]
#[tokio::test]
async fn test_hydrate_writes_output(site: TempDir) {
	let out = site.path().join("dist.html");
	run_args(&[
		"hydrate".into(),
		arg(&site.path().join("index.html")),
		"-o".into(),
		arg(&out),
		"--config".into(),
		arg(&site.path().join("missing.toml")),
		"--tab".into(),
		"equipo".into(),
		"--theme-color".into(),
		"#FF0066".into(),
	])
	.await
	.unwrap();

	let html = fs::read_to_string(out).unwrap();
	assert!(html.contains(r#"<div data-key="intro">Hola <b>equipo</b></div>"#), "{html}");
	assert!(html.contains(r#"<h1 data-fill="titulo">Bienvenida</h1>"#));
	assert!(html.contains("--color-primary: #FF0066"));
	assert!(html.contains(r#"id="tab-equipo" role="tabpanel" class="is-active""#));
}

#[rstest]
#[tokio::test]
async fn test_hydrate_escape_markup(site: TempDir) {
	let out = site.path().join("dist.html");
	run_args(&[
		"hydrate".into(),
		arg(&site.path().join("index.html")),
		"--output".into(),
		arg(&out),
		"--config".into(),
		arg(&site.path().join("missing.toml")),
		"--escape-markup".into(),
	])
	.await
	.unwrap();

	let html = fs::read_to_string(out).unwrap();
	assert!(html.contains("Hola &lt;b&gt;equipo&lt;/b&gt;"), "{html}");
}

#[rstest]
#[tokio::test]
async fn test_hydrate_with_unreachable_document_still_succeeds(site: TempDir) {
	let out = site.path().join("dist.html");
	run_args(&[
		"hydrate".into(),
		arg(&site.path().join("index.html")),
		"-o".into(),
		arg(&out),
		"--config".into(),
		arg(&site.path().join("missing.toml")),
		"--json-url".into(),
		"no-existe.json".into(),
	])
	.await
	.unwrap();

	let html = fs::read_to_string(out).unwrap();
	assert!(html.contains(r#"<h1 data-fill="titulo">Inducción</h1>"#));
}

#[rstest]
#[tokio::test]
async fn test_hydrate_missing_template_fails(site: TempDir) {
	let result = run_args(&["hydrate".into(), arg(&site.path().join("nada.html"))]).await;
	assert!(result.unwrap_err().to_string().contains("Cannot read template"));
}

#[rstest]
#[tokio::test]
async fn test_resolve_missing_path_fails(site: TempDir) {
	let document = arg(&site.path().join("induccion.json"));
	run_args(&["resolve".into(), document.clone(), "equipo".into()]).await.unwrap();
	let result = run_args(&["resolve".into(), document, "equipo.lider".into()]).await;
	assert!(result.unwrap_err().to_string().contains("Path not found"));
}

#[rstest]
#[tokio::test]
async fn test_placeholders_with_document(site: TempDir) {
	run_args(&[
		"placeholders".into(),
		arg(&site.path().join("index.html")),
		"--json-url".into(),
		"induccion.json".into(),
	])
	.await
	.unwrap();
}

#[rstest]
#[tokio::test]
async fn test_show_config_rejects_invalid_settings(site: TempDir) {
	let config = site.path().join("induction.toml");
	fs::write(&config, "slot_class = \"dos clases\"\n").unwrap();
	let result = run_args(&["show-config".into(), "--config".into(), arg(&config)]).await;
	assert!(result.is_err());
}
