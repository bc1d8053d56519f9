//! peek/bin — コマンドラインの入口
//!
//! URL ごとにクライアントを1つ作り、`--repeat` 回だけ GET して受け取ったバイト列を
//! そのまま標準出力へ書きます。`--status` を付けるとステータスラインの各フィールドも表示します。
//!
//! ```text
//! $ RUST_LOG=debug peek http://example.com/ --repeat 2 --status
//! ```

use anyhow::Context;
use clap::Parser;
use log::info;
use net_std::http::HttpClient;
use peek_core::config::ClientConfig;
use peek_core::observer::{Observer, ReportValue};
use peek_core::url::Url;

#[derive(Debug, Parser)]
#[command(name = "peek", version, about = "Send one GET and print the first chunk of the reply")]
struct Args {
    /// 取得する URL（http:// のみ）
    #[arg(default_value = "http://www.google.com/")]
    urls: Vec<String>,

    /// 同じクライアントで何回取得するか
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// 1回の read で受け取る最大バイト数
    #[arg(long, default_value_t = peek_core::config::DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// `Host:` ヘッダを付ける
    #[arg(long)]
    host_header: bool,

    /// ステータスライン（proto / code / msg）を表示する
    #[arg(long)]
    status: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    for url in &args.urls {
        let parsed = Url::parse(url).with_context(|| format!("invalid url {}", url))?;
        let config = ClientConfig::from_url(&parsed)
            .with_buffer_size(args.buffer_size)?
            .with_host_header(args.host_header);

        if args.status {
            let printer = |name: &str, value: ReportValue| println!("{} = {}", name, value);
            run(&HttpClient::with_observer(config, printer), &parsed, args.repeat)?;
        } else {
            run(&HttpClient::new(config), &parsed, args.repeat)?;
        }
    }

    Ok(())
}

fn run<O: Observer>(client: &HttpClient<O>, url: &Url, repeat: usize) -> anyhow::Result<()> {
    let target = url.request_target();
    for _ in 0..repeat {
        info!("GET {} from {}:{}", target, url.host(), url.port());
        let raw = client
            .fetch(&target)
            .with_context(|| format!("failed to fetch {}", target))?;
        println!("{}", String::from_utf8_lossy(&raw));
    }
    Ok(())
}
