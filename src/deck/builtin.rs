//! Built-in deck: C/C++ unit-testing frameworks compared.
//!
//! Twenty slides at 30fps: cover, contenders, comparison matrix, an overview
//! and a code slide for each of the eight frameworks, and the outro.

use super::{Deck, SlideSpec, DEFAULT_FPS, DEFAULT_TRAILING_FRAMES};
use crate::timeline::{Frame, DEFAULT_FALLBACK_FRAMES};

/// Start frames of the built-in slides.
pub(super) const SLIDE_STARTS: [Frame; 20] = [
    0,    // cover           (3s)
    90,   // contenders      (3s)
    180,  // matrix          (8s)
    420,  // CMocka          (4s each from here on)
    540,  // code
    660,  // Unity + fff
    780,  // code
    900,  // GoogleTest + GMock
    1020, // code
    1140, // GoogleTest + MockCpp
    1260, // code
    1380, // CppUTest
    1500, // code
    1620, // Check
    1740, // code
    1860, // Catch2
    1980, // code
    2100, // doctest
    2220, // code
    2340, // outro
];

/// (name, language, mock mechanism, best fit)
const FRAMEWORKS: [(&str, &str, &str, &str); 8] = [
    ("CMocka", "C", "链接时 --wrap", "嵌入式 / 纯 C 项目"),
    ("Unity + fff", "C", "函数指针替换", "资源受限的嵌入式环境"),
    ("GoogleTest + GMock", "C++", "--wrap / 虚函数", "大型 C++ 项目 / 企业级开发"),
    ("GoogleTest + MockCpp", "C++", "运行时 Hook", "无法修改源码的遗留系统"),
    ("CppUTest", "C++", "--wrap + Mock API", "对内存安全要求高的项目"),
    ("Check", "C", "链接时 --wrap", "需要测试崩溃/信号的系统级代码"),
    ("Catch2", "C++", "链接时 --wrap", "追求开发体验的现代 C++ 项目"),
    ("doctest", "C++", "链接时 --wrap", "对编译速度敏感 / 需要嵌入式测试的项目"),
];

pub(super) fn unit_testing_frameworks() -> Deck {
    let mut slides = vec![
        ("C/C++ 单元测试框架".to_string(), "8 大框架全面对比与实战指南".to_string()),
        (
            "参赛选手".to_string(),
            FRAMEWORKS
                .iter()
                .map(|(name, ..)| *name)
                .collect::<Vec<_>>()
                .join(" · "),
        ),
        (
            "框架对比矩阵".to_string(),
            "语言 · Mock 机制 · 参数匹配 · 内存泄漏检测 · Fork 隔离 · BDD 语法".to_string(),
        ),
    ];

    for (name, language, mock, best_for) in FRAMEWORKS {
        slides.push((
            name.to_string(),
            format!("{} · {} · {}", language, mock, best_for),
        ));
        slides.push((format!("{} 代码示例", name), format!("Mock: {}", mock)));
    }

    slides.push((
        "感谢观看".to_string(),
        "完整代码 & 文档: github.com/huatuo/clang-ut-tools".to_string(),
    ));

    Deck {
        title: "C/C++ 单元测试框架对比".to_string(),
        fps: DEFAULT_FPS,
        trailing_frames: DEFAULT_TRAILING_FRAMES,
        fallback_frames: DEFAULT_FALLBACK_FRAMES,
        slides: SLIDE_STARTS
            .iter()
            .zip(slides)
            .map(|(&start, (title, subtitle))| SlideSpec {
                start,
                title,
                subtitle,
            })
            .collect(),
    }
}
