use basics_codelab::{app, tags};
use sprout_devtools::dump_tree;
use sprout_platform::{HostConfig, Step, run_headless_app};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let dark = std::env::var("CODELAB_DARK").is_ok_and(|v| v == "1");
    log::info!("Starting basics codelab (dark theme: {dark})");

    let script = [
        Step::Click(tags::CONTINUE.into()),
        Step::Click(tags::toggle("5")),
        Step::Scroll(tags::GREETINGS.into(), 200.0),
        Step::Recreate,
        Step::ClickLabel("Show more".into()),
    ];
    let config = HostConfig {
        inspector: true,
        ..HostConfig::default()
    };
    let mut host = run_headless_app(app(dark), config, &script)?;

    print!("{}", dump_tree(&host.frame().root));
    println!("{}", host.inspector().summary());
    println!("saved: {}", host.save_instance_state().to_json());
    host.dispose();
    Ok(())
}
