//! Macros for embedding relational programs as a DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds.
///
/// All subgoals are interleaved round-robin.
#[macro_export]
macro_rules! either {
    () => { $crate::prelude::fail() };
    ($g:expr $(;)?) => { $g };
    ($g0:expr; $($g:expr);+ $(;)?) => {
        $crate::prelude::any(vec![
            $crate::prelude::SharedGoal::new($g0),
            $($crate::prelude::SharedGoal::new($g)),+
        ])
    };
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! both {
    () => { $crate::prelude::succeed() };
    ($g:expr $(,)?) => { $g };
    ($g0:expr, $($g:expr),+ $(,)?) => { $crate::prelude::both($g0, $crate::both!($($g),+)) };
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// The body is a conjunction of goals. It becomes a `move` closure that
/// may run many times, so it takes ownership of every term it mentions
/// from the surrounding scope and must clone them inside. Bind a clone
/// first if the original is still needed afterwards.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),+ $(,)?) => {
        $crate::prelude::with_variables(
            [$(stringify!($x)),*],
            move |[$($x),*]| $crate::both!($($g),+),
        )
    };
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// Arguments accept anything convertible into a term. The body is built
/// anew each time the goal is pursued, so relations may be recursive.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr),+ $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),+ })
        }
    };

    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr),+ $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),+ })
        }
    };

    (@body: $($args:ident),* { $($g:expr),+ }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |state: $crate::prelude::State| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::pursue_in(&$crate::both!($($g),+), state)
            })
        }
    }};
}

/// Run one or more goals and report the values of the fresh variables.
///
/// The syntax `run!(n, (x, y), goal1, goal2, ...)` produces at most n
/// solutions. The syntax `run!(*, (x, y), goal1, goal2, ...)` produces all
/// solutions, and does not return if there are infinitely many.
/// Each solution is the vector of the variables' resolved values.
///
/// The syntax `run!((x, y), goal1, goal2, ...)` returns a (possibly
/// infinite) iterator over all solutions.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),*), $($g:expr),+ $(,)?) => {{
        let n = [$(stringify!($x)),*].len();
        $crate::prelude::Goal::pursue_in(
            &$crate::fresh!(($($x),*), $($g),+),
            $crate::prelude::State::empty(),
        )
        .take_inf_all()
        .map(move |s| s.results(n))
    }};

    (($($x:ident),*), $($g:expr),+ $(,)?) => {{
        let n = [$(stringify!($x)),*].len();
        $crate::prelude::Goal::pursue_in(
            &$crate::fresh!(($($x),*), $($g),+),
            $crate::prelude::State::empty(),
        )
        .into_iter()
        .map(move |s| s.map(|s| s.results(n)))
    }};

    ($n:expr, ($($x:ident),*), $($g:expr),+ $(,)?) => {{
        let n = [$(stringify!($x)),*].len();
        $crate::prelude::Goal::pursue_in(
            &$crate::fresh!(($($x),*), $($g),+),
            $crate::prelude::State::empty(),
        )
        .take_inf($n)
        .map(move |s| s.results(n))
    }};
}
