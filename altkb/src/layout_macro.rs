/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::$k,
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x))
    };
}

/// Create a layer toggle action
#[macro_export]
macro_rules! tg {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerToggle($x))
    };
}

/// create a switch default layer action, `n` is the layer number
#[macro_export]
macro_rules! df {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::DefaultLayer($x))
    };
}

/// Place the 67 keys of a 65% ANSI blocker layout into the 5x15 matrix, unused matrix positions are `No`.
///
/// ```text
/// ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───────┬───┐
/// │00 │01 │02 │03 │04 │05 │06 │07 │08 │09 │0A │0B │0C │  0D   │0E │
/// ├───┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─────┼───┤
/// │ 10  │11 │12 │13 │14 │15 │16 │17 │18 │19 │1A │1B │1C │ 1D  │1E │
/// ├─────┴┬──┴┬──┴┬──┴┬──┴┬──┴┬──┴┬──┴┬──┴┬──┴┬──┴┬──┴┬──┴─────┼───┤
/// │  20  │21 │22 │23 │24 │25 │26 │27 │28 │29 │2A │2B │   2D   │2E │
/// ├──────┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴─┬─┴────┬───┼───┤
/// │   30   │31 │32 │33 │34 │35 │36 │37 │38 │39 │3A │  3C  │3D │3E │
/// ├────┬───┴┬──┴─┬─┴───┴───┴───┴───┴───┴──┬┴───┼───┴┬─┬───┼───┼───┤
/// │ 40 │ 41 │ 42 │          46            │ 4A │ 4B │ │4C │4D │4E │
/// └────┴────┴────┴────────────────────────┴────┴────┘ └───┴───┴───┘
/// ```
#[macro_export]
macro_rules! layout_65_ansi_blocker {
    (
        $k00:expr, $k01:expr, $k02:expr, $k03:expr, $k04:expr, $k05:expr, $k06:expr, $k07:expr, $k08:expr, $k09:expr, $k0a:expr, $k0b:expr, $k0c:expr, $k0d:expr, $k0e:expr,
        $k10:expr, $k11:expr, $k12:expr, $k13:expr, $k14:expr, $k15:expr, $k16:expr, $k17:expr, $k18:expr, $k19:expr, $k1a:expr, $k1b:expr, $k1c:expr, $k1d:expr, $k1e:expr,
        $k20:expr, $k21:expr, $k22:expr, $k23:expr, $k24:expr, $k25:expr, $k26:expr, $k27:expr, $k28:expr, $k29:expr, $k2a:expr, $k2b:expr,             $k2d:expr, $k2e:expr,
        $k30:expr, $k31:expr, $k32:expr, $k33:expr, $k34:expr, $k35:expr, $k36:expr, $k37:expr, $k38:expr, $k39:expr, $k3a:expr,             $k3c:expr, $k3d:expr, $k3e:expr,
        $k40:expr, $k41:expr, $k42:expr,                         $k46:expr,                         $k4a:expr, $k4b:expr, $k4c:expr, $k4d:expr, $k4e:expr $(,)?
    ) => {
        [
            [$k00, $k01, $k02, $k03, $k04, $k05, $k06, $k07, $k08, $k09, $k0a, $k0b, $k0c, $k0d, $k0e],
            [$k10, $k11, $k12, $k13, $k14, $k15, $k16, $k17, $k18, $k19, $k1a, $k1b, $k1c, $k1d, $k1e],
            [$k20, $k21, $k22, $k23, $k24, $k25, $k26, $k27, $k28, $k29, $k2a, $k2b, $crate::a!(No), $k2d, $k2e],
            [$k30, $k31, $k32, $k33, $k34, $k35, $k36, $k37, $k38, $k39, $k3a, $crate::a!(No), $k3c, $k3d, $k3e],
            [$k40, $k41, $k42, $crate::a!(No), $crate::a!(No), $crate::a!(No), $k46, $crate::a!(No), $crate::a!(No), $crate::a!(No), $k4a, $k4b, $k4c, $k4d, $k4e],
        ]
    };
}
