use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::LevelFilter;
use fountain_rust::{Conf, FountainError, FountainParser, FountainResult, ScreenplayProperties};

/// 解析 Fountain 剧本并输出结构化结果
#[derive(Parser, Debug)]
#[command(name = "fountain-parser", version, about)]
struct Args {
    /// Fountain 剧本文件
    file: PathBuf,

    /// JSON 格式的配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 以 JSON 输出完整解析结果
    #[arg(long)]
    json: bool,

    /// 格式化 JSON 输出
    #[arg(long, requires = "json")]
    pretty: bool,

    /// 日志详细程度，可重复 (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_conf(path: Option<&PathBuf>) -> FountainResult<Conf> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| FountainError::Io {
                path: path.clone(),
                source,
            })?;
            Conf::from_json(&text)
        }
        None => Ok(Conf::default()),
    }
}

fn run(args: &Args) -> FountainResult<()> {
    let conf = load_conf(args.config.as_ref())?;
    let doc = FountainParser::with_conf(conf).parse_file(&args.file)?;

    if args.json {
        let out = if args.pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        };
        println!("{}", out.map_err(|e| FountainError::Config(e.to_string()))?);
        return Ok(());
    }

    let props = ScreenplayProperties::from_document(&doc);
    println!("解析完成！");
    if let Some(title) = doc.title() {
        println!("标题: {}", title);
    }
    println!("元素数量: {}", doc.elements.len());
    println!("可表演元素: {}", props.performable_count);
    println!("场景数量: {}", props.scene_names.len());
    println!("角色数量: {}", props.characters.len());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("解析失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
