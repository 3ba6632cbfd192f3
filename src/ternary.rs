/// A conditional expression that `cargo fmt` leaves on one line.  The
/// lattice has plenty of "is there a neighbor on this side?" cases,
/// and they read better as a column of `cq!`s than as stacked `if`
/// blocks.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
