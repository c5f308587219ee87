mod command;
mod render;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
