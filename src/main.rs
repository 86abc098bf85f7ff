fn main() -> anyhow::Result<()> {
    dormdesk::tracing::init();
    dormdesk::app::run()
}
