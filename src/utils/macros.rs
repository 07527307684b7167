#[macro_export]
macro_rules! min {
    ( $a:expr $(, $tail:expr)+ ) => ({
        // ::core::cmp::min($a, min!($($tail),*))
        let other = min!($($tail),+);
        if $a < other {
            $a
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}

#[macro_export]
macro_rules! max {
    ( $a:expr $(, $tail:expr)+ ) => ({
        let other = max!($($tail),+);
        if $a > other {
            $a
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}

#[macro_export]
macro_rules! iter_const {
    ( for $t:ident in $start:expr ,.. $end:expr => $bl:block ) => {{
        let mut $t = $start;
        if $start < $end {
            loop {
                $bl;

                $t += 1;
                if $t >= $end {
                    break;
                }
            }
        }
    }};
}
