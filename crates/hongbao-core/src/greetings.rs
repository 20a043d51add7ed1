use rand::prelude::*;

/// A pre-written New Year blessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Greeting {
    pub title: &'static str,
    pub lines: [&'static str; 4],
    pub lucky_word: char,
}

pub const GREETINGS: [Greeting; 5] = [
    Greeting {
        title: "喜气洋洋",
        lines: ["烟花璀璨映红妆", "岁月峥嵘又一章", "福星高照财源广", "阖家欢乐万年长"],
        lucky_word: '福',
    },
    Greeting {
        title: "龙腾四海",
        lines: ["金龙起舞迎新岁", "瑞气盈门照堂前", "鸿运当头添喜悦", "前程似锦步步连"],
        lucky_word: '龙',
    },
    Greeting {
        title: "财源广进",
        lines: ["门迎紫气纳千祥", "户映金光添吉昌", "广进财源连四海", "笑看春风满华堂"],
        lucky_word: '财',
    },
    Greeting {
        title: "阖家安康",
        lines: ["春暖花开盈庭院", "笑语欢声绕膝前", "人寿年丰多顺遂", "家和万事保平安"],
        lucky_word: '安',
    },
    Greeting {
        title: "学业有成",
        lines: ["笔落生辉题锦卷", "勤耕不辍筑华年", "前路星辰皆可摘", "蟾宫折桂好少年"],
        lucky_word: '智',
    },
];

/// Uniformly pick one entry of [`GREETINGS`].
pub fn pick_greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static Greeting {
    &GREETINGS[rng.gen_range(0..GREETINGS.len())]
}

/// Seeded source of greetings.
pub struct Blessings {
    rng: StdRng,
}

impl Blessings {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn draw(&mut self) -> &'static Greeting {
        pick_greeting(&mut self.rng)
    }
}
