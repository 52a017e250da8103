fn main() -> anyhow::Result<()> {
	aml::cli::main()
}
