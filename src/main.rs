use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;
use std::process::ExitCode;

use lsb_extract::{cli::Cli, handler::handle_extract};

/// 根据 `-v` 的次数初始化日志。不读取环境变量。
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// 程序的主入口点
///
/// 解析命令行参数并执行提取。任何失败都会打印一行错误信息并以状态码 1 退出。
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help 与 --version 不算错误
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_logger(cli.verbose);

    match handle_extract(cli.extract) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
