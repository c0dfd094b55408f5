/// Folds `series` into averages of `batch_size` values, in order.
///
/// A batch is only emitted when the next value arrives, and the trailing
/// accumulator is always emitted at the end. The trailing value is divided by
/// `batch_size` even when fewer values were folded into it, so an empty series
/// yields a single `0.0`. A zero `batch_size` is treated as 1.
pub fn batched_averages(series: &[i64], batch_size: usize) -> Vec<f64> {
    let batch_size = batch_size.max(1);
    let divisor = batch_size as f64;
    let mut averages = Vec::with_capacity(series.len() / batch_size + 1);
    let mut acc: i128 = 0;
    let mut count = 0usize;
    for &value in series {
        if count > batch_size - 1 {
            averages.push(acc as f64 / divisor);
            acc = 0;
            count = 0;
        }
        acc += i128::from(value);
        count += 1;
    }
    averages.push(acc as f64 / divisor);
    averages
}
