#[tokio::main]
async fn main() {
    if let Err(e) = lexedu_lib::run().await {
        eprintln!("lexedu: {}", e);
        std::process::exit(1);
    }
}
