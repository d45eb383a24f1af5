use std::fmt::Write;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

/// A plausible log: nested method frames, each issuing one query, plus a
/// sprinkle of debug statements and a governor-limit block.
fn synthetic_log(frames: usize) -> String {
  let mut log = String::new();
  log.push_str("64.0 APEX_CODE,FINE;APEX_PROFILING,INFO;DB,INFO\n");
  let mut now = 1_000u64;

  for frame in 0..frames {
    writeln!(
      log,
      "12:00:00.0 ({now})|METHOD_ENTRY|[{frame}]|01p000|Outer.Inner.method{frame}()"
    )
    .unwrap();
    now += 100;
    writeln!(
      log,
      "12:00:00.0 ({now})|SOQL_EXECUTE_BEGIN|[{frame}]|Aggregations:0|SELECT Id FROM Account"
    )
    .unwrap();
    now += 250;
    writeln!(log, "12:00:00.0 ({now})|SOQL_EXECUTE_END|[{frame}]|Rows:7").unwrap();
    now += 50;
    writeln!(log, "12:00:00.0 ({now})|USER_DEBUG|[{frame}]|DEBUG|frame {frame}").unwrap();
    now += 50;
  }
  for frame in (0..frames).rev() {
    now += 100;
    writeln!(
      log,
      "12:00:00.0 ({now})|METHOD_EXIT|[{frame}]|Outer.Inner.method{frame}()"
    )
    .unwrap();
  }

  now += 100;
  writeln!(log, "12:00:00.0 ({now})|LIMIT_USAGE_FOR_NS|(default)").unwrap();
  log.push_str("  Number of SOQL queries: 100 out of 100\n");
  log.push_str("  Maximum CPU time: 9000 out of 10000\n");
  log
}

fn bench_parse(c: &mut Criterion) {
  let small = synthetic_log(100);
  let large = synthetic_log(5_000);

  c.bench_function("parse_100_frames", |b| {
    b.iter(|| apexlog::parse(black_box(&small)))
  });
  c.bench_function("parse_5000_frames", |b| {
    b.iter(|| apexlog::parse(black_box(&large)))
  });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
