fn main() -> Result<(), zlm_player::cli::Failure> {
    zlm_player::run()
}
