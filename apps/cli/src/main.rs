fn main() -> anyhow::Result<()> {
    quiz_bank_cli::run()
}
