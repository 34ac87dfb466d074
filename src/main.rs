// ==========================================
// 连锁群报告页组件 - 命令行入口
// ==========================================
// 用法:
//   linkage-tracks [--json-log] [--init-schema] <class_name> <id> [db_path]
//   class_name: GeneticMap | LinkageGroup | QTL
//   --json-log: JSON 行格式日志
//   --init-schema: 先建表（本地演示/空库）
// 输出: tracksCount / maxLGLength / tracksJSON，未找到连锁群时无输出
// ==========================================

use anyhow::{bail, Context};
use linkage_tracks::app::{get_default_db_path, AppState};
use linkage_tracks::displayer::{AttributeValue, ReportObject, MAX_LG_LENGTH, TRACKS_COUNT, TRACKS_JSON};
use linkage_tracks::logging;

/// 命令行开关
#[derive(Debug, Default, PartialEq, Eq)]
struct Flags {
    json_log: bool,
    init_schema: bool,
}

/// 拆分开关与位置参数
fn split_flags(args: impl Iterator<Item = String>) -> anyhow::Result<(Flags, Vec<String>)> {
    let mut flags = Flags::default();
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json-log" => flags.json_log = true,
            "--init-schema" => flags.init_schema = true,
            other if other.starts_with("--") => bail!("未知选项: {}", other),
            _ => positional.push(arg),
        }
    }
    Ok((flags, positional))
}

fn main() -> anyhow::Result<()> {
    let (flags, positional) = split_flags(std::env::args().skip(1))?;

    if flags.json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    let mut args = positional.into_iter();
    let (class_name, id) = match (args.next(), args.next()) {
        (Some(class_name), Some(id)) => (class_name, id),
        _ => bail!(
            "用法: linkage-tracks [--json-log] [--init-schema] <GeneticMap|LinkageGroup|QTL> <id> [db_path]"
        ),
    };
    let id: i64 = id
        .trim()
        .parse()
        .with_context(|| format!("无效的 id: {}", id))?;
    let db_path = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(get_default_db_path);

    tracing::info!("{} v{}", linkage_tracks::APP_NAME, linkage_tracks::VERSION);
    tracing::info!("使用数据库: {}", db_path);

    let state = if flags.init_schema {
        AppState::bootstrap(db_path)
    } else {
        AppState::new(db_path)
    }
    .context("无法初始化AppState")?;
    let ctx = state.display_report(&ReportObject::new(id, &class_name))?;

    if ctx.is_empty() {
        tracing::info!(class_name = %class_name, id, "无轨道输出");
        return Ok(());
    }

    for name in [TRACKS_COUNT, MAX_LG_LENGTH, TRACKS_JSON] {
        match ctx.get_attribute(name) {
            Some(AttributeValue::Integer(v)) => println!("{}={}", name, v),
            Some(AttributeValue::Real(v)) => println!("{}={}", name, v),
            Some(AttributeValue::Text(v)) => println!("{}={}", name, v),
            None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_split_flags() {
        let (flags, positional) =
            split_flags(args(&["--json-log", "GeneticMap", "5", "--init-schema"])).unwrap();
        assert_eq!(
            flags,
            Flags {
                json_log: true,
                init_schema: true
            }
        );
        assert_eq!(positional, vec!["GeneticMap", "5"]);
    }

    #[test]
    fn test_split_flags_rejects_unknown_option() {
        assert!(split_flags(args(&["--verbose", "QTL", "1"])).is_err());
    }
}
