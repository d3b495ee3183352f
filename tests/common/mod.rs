#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use zypshot::application::ports::{
    Interrupted, Prompter, Reporter, SnapshotTool, TableView, Tone,
};
use zypshot::domain::cleanup::CleanupAlgorithm;

pub const LIST_OUTPUT: &str = "\
 # │ Type   │ Pre # │ Date                     │ User │ Cleanup │ Description        │ Userdata
───┼────────┼───────┼──────────────────────────┼──────┼─────────┼────────────────────┼─────────
0  │ single │       │                          │ root │         │ current            │
1  │ pre    │       │ Tue 01 Oct 2024 10:00:00 │ root │ number  │ zypper install vim │
2  │ post   │     1 │ Tue 01 Oct 2024 10:01:00 │ root │ number  │                    │ important=yes
";

/// 명령별로 정해진 출력을 돌려주고 호출을 기록하는 가짜 snapper.
#[derive(Clone, Default)]
pub struct FakeSnapper {
    outputs: Arc<Mutex<HashMap<&'static str, Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeSnapper {
    pub fn with_output(self, command: &'static str, output: &str) -> Self {
        self.outputs
            .lock()
            .unwrap()
            .insert(command, Ok(output.to_string()));
        self
    }

    pub fn with_failure(self, command: &'static str, message: &str) -> Self {
        self.outputs
            .lock()
            .unwrap()
            .insert(command, Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, command: &'static str, call: String) -> Result<String> {
        self.calls.lock().unwrap().push(call);
        match self.outputs.lock().unwrap().get(command) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Ok(String::new()),
        }
    }
}

#[async_trait]
impl SnapshotTool for FakeSnapper {
    async fn list(&self) -> Result<String> {
        self.respond("list", "list".to_string())
    }

    async fn create(&self, description: &str) -> Result<String> {
        self.respond("create", format!("create {description}"))
    }

    async fn delete(&self, number: &str) -> Result<String> {
        self.respond("delete", format!("delete {number}"))
    }

    async fn status(&self, from: &str, to: &str) -> Result<String> {
        self.respond("status", format!("status {from}..{to}"))
    }

    async fn cleanup(&self, algorithm: CleanupAlgorithm) -> Result<String> {
        self.respond("cleanup", format!("cleanup {algorithm}"))
    }
}

/// 출력 내용을 평문 줄로 쌓아두는 리포터.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines().iter().filter(|line| line.contains(needle)).count()
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl Reporter for RecordingReporter {
    fn clear(&self) {}

    fn banner(&self, title: &str, subtitle: &str) {
        self.push(format!("[banner] {title} / {subtitle}"));
    }

    fn table(&self, table: &TableView) {
        self.push(format!("[table] {}", table.title));
        for row in &table.rows {
            self.push(row.join(" | "));
        }
    }

    fn panel(&self, title: &str, lines: &[String], _tone: Tone) {
        self.push(format!("[panel] {title}"));
        for line in lines {
            self.push(line.clone());
        }
    }

    fn notice(&self, tone: Tone, message: &str) {
        self.push(format!("[{tone:?}] {message}"));
    }

    fn raw(&self, line: &str) {
        self.push(line.to_string());
    }
}

/// 미리 정한 답을 순서대로 돌려주는 프롬프터. 답이 떨어지면 사용자 중단으로 처리한다.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(
                answers.iter().map(ToString::to_string).collect(),
            )),
            asked: Arc::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, message: &str) -> Result<String> {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Interrupted.into())
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(&self, message: &str, choices: &[&str], default: &str) -> Result<String> {
        loop {
            let answer = self.next(message)?;
            if answer.is_empty() {
                return Ok(default.to_string());
            }
            if choices.contains(&answer.as_str()) {
                return Ok(answer);
            }
        }
    }

    fn text(&self, message: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next(message)?;
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn select(&self, message: &str, _candidates: &[String]) -> Result<Option<String>> {
        let answer = self.next(message)?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Ok(match self.next(message)?.as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }

    fn pause(&self, message: &str) -> Result<()> {
        self.next(message).map(|_| ())
    }
}
