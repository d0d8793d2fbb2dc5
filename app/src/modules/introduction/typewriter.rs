use futures::stream::{self, Stream};
use std::time::Duration;

/// 打字机效果
///
/// 每个节拍多显示一个字符，按字符（而非字节）切分
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    interval: Duration,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        Self {
            text: text.into(),
            interval,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 帧数等于字符数
    pub fn frame_count(&self) -> usize {
        self.text.chars().count()
    }

    /// 所有帧，最后一帧为全文
    pub fn frames(&self) -> impl Iterator<Item = &str> + '_ {
        self.text
            .char_indices()
            .map(|(start, c)| &self.text[..start + c.len_utf8()])
    }

    /// 按节拍产出帧，显示完全文后结束
    pub fn reveal(&self) -> impl Stream<Item = String> + Send + 'static {
        let text = self.text.clone();
        let interval = self.interval;
        let ends: Vec<usize> = text
            .char_indices()
            .map(|(start, c)| start + c.len_utf8())
            .collect();

        stream::unfold(ends.into_iter(), move |mut ends| {
            let frame = ends.next().map(|end| text[..end].to_string());
            async move {
                let frame = frame?;
                tokio::time::sleep(interval).await;
                Some((frame, ends))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_frames_grow_one_char_at_a_time() {
        let typewriter = Typewriter::new("¡Hola!", Duration::from_millis(50));
        let frames: Vec<&str> = typewriter.frames().collect();

        assert_eq!(frames, vec!["¡", "¡H", "¡Ho", "¡Hol", "¡Hola", "¡Hola!"]);
        assert_eq!(typewriter.frame_count(), 6);
    }

    #[test]
    fn test_empty_text_has_no_frames() {
        let typewriter = Typewriter::new("", Duration::from_millis(50));
        assert_eq!(typewriter.frames().count(), 0);
    }

    #[tokio::test]
    async fn test_reveal_ends_at_full_text() {
        let typewriter = Typewriter::new("Sí, señor", Duration::ZERO);

        let frames: Vec<String> = typewriter.reveal().collect().await;

        assert_eq!(frames.len(), 9);
        assert_eq!(frames[0], "S");
        assert_eq!(frames.last().map(String::as_str), Some("Sí, señor"));
        for pair in frames.windows(2) {
            assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
            assert!(pair[1].starts_with(pair[0].as_str()));
        }
    }
}
